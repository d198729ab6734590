use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported SVM kernel types.
#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum KernelKind {
    Linear,
    Gaussian,
    Poly,
}

impl KernelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KernelKind::Linear => "linear",
            KernelKind::Gaussian => "gaussian",
            KernelKind::Poly => "poly",
        }
    }
}

impl fmt::Display for KernelKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for KernelKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "linear" => Ok(KernelKind::Linear),
            "gauss" | "gaussian" | "rbf" => Ok(KernelKind::Gaussian),
            "poly" | "polynomial" => Ok(KernelKind::Poly),
            _ => Err(format!(
                "Unknown kernel type: {}. Valid options are: linear, gaussian, poly",
                s
            )),
        }
    }
}

/// One concrete hyperparameter candidate for the SVM wrapper.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SvmHyperParams {
    pub kernel: KernelKind,
    /// Positive/negative class weights (the C penalty per class).
    pub c: (f64, f64),
    /// Solver tolerance.
    pub eps: f64,
    pub gaussian_kernel_eps: f64,
    pub polynomial_kernel_constant: f64,
    pub polynomial_kernel_degree: f64,
}

impl Default for SvmHyperParams {
    fn default() -> Self {
        Self {
            kernel: KernelKind::Linear,
            c: (1.0, 1.0),
            eps: 0.1,
            gaussian_kernel_eps: 0.1,
            polynomial_kernel_constant: 1.0,
            polynomial_kernel_degree: 3.0,
        }
    }
}

/// Value lists to search for one kernel. Fields that do not apply to the
/// kernel are ignored during expansion.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct KernelGrid {
    pub c: Vec<f64>,
    pub gaussian_kernel_eps: Vec<f64>,
    pub polynomial_kernel_constant: Vec<f64>,
    pub polynomial_kernel_degree: Vec<f64>,
    /// Solver tolerance is fixed rather than searched.
    pub eps: f64,
}

impl Default for KernelGrid {
    fn default() -> Self {
        Self {
            c: vec![0.1, 1.0, 10.0],
            gaussian_kernel_eps: vec![0.1],
            polynomial_kernel_constant: vec![1.0],
            polynomial_kernel_degree: vec![3.0],
            eps: 0.1,
        }
    }
}

impl KernelGrid {
    /// Expand to the cartesian product of the fields relevant to `kernel`.
    pub fn expand(&self, kernel: KernelKind) -> Vec<SvmHyperParams> {
        let base = |c: f64| SvmHyperParams {
            kernel,
            c: (c, c),
            eps: self.eps,
            ..SvmHyperParams::default()
        };

        let mut out = Vec::new();
        match kernel {
            KernelKind::Linear => {
                for &c in &self.c {
                    out.push(base(c));
                }
            }
            KernelKind::Gaussian => {
                for &c in &self.c {
                    for &kernel_eps in &self.gaussian_kernel_eps {
                        let mut params = base(c);
                        params.gaussian_kernel_eps = kernel_eps;
                        out.push(params);
                    }
                }
            }
            KernelKind::Poly => {
                for &c in &self.c {
                    for &constant in &self.polynomial_kernel_constant {
                        for &degree in &self.polynomial_kernel_degree {
                            let mut params = base(c);
                            params.polynomial_kernel_constant = constant;
                            params.polynomial_kernel_degree = degree;
                            out.push(params);
                        }
                    }
                }
            }
        }
        out
    }
}

/// Search-level knobs shared by all kernels.
#[derive(Deserialize, Serialize, Debug, Clone, Copy)]
pub struct SearchConfig {
    /// Number of cross-validation folds.
    pub k_fold: usize,
    /// Features eliminated per RFE round.
    pub rfe_step: usize,
    /// Seed for fold shuffling, giving reproducible splits.
    pub random_state: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            k_fold: 5,
            rfe_step: 1,
            random_state: 42,
        }
    }
}
