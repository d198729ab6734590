pub mod collinearity;
pub mod rfe;

pub use collinearity::assess_collinearity;
pub use rfe::{Rfecv, RfecvFit};
