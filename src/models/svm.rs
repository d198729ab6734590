use linfa::traits::{Fit, Predict};
use linfa::Dataset;
use linfa_svm::{Svm, SvmParams};
use ndarray::{Array1, Array2};

use crate::config::{KernelKind, SvmHyperParams};
use crate::error::TuneError;

/// Thin wrapper over the linfa-svm binary classifier.
///
/// Holds the hyperparameters of one candidate and the fitted model, if
/// any. All solver work is delegated to `linfa_svm`.
pub struct SvmClassifier {
    model: Option<Svm<f64, bool>>,
    params: SvmHyperParams,
}

impl SvmClassifier {
    pub fn new(params: SvmHyperParams) -> Self {
        SvmClassifier {
            model: None,
            params,
        }
    }

    pub fn params(&self) -> &SvmHyperParams {
        &self.params
    }

    pub fn is_fitted(&self) -> bool {
        self.model.is_some()
    }

    /// Fit on a feature matrix and boolean class labels.
    pub fn fit(&mut self, x: &Array2<f64>, y: &Array1<bool>) -> Result<(), TuneError> {
        if x.nrows() != y.len() {
            return Err(TuneError::LengthMismatch {
                expected: x.nrows(),
                got: y.len(),
            });
        }

        let dataset = Dataset::new(x.to_owned(), y.to_owned());

        let (c_pos, c_neg) = self.params.c;
        let mut model: SvmParams<f64, bool> = Svm::<f64, bool>::params()
            .eps(self.params.eps)
            .pos_neg_weights(c_pos, c_neg);

        // Chain the kernel configuration based on the kernel type
        model = match self.params.kernel {
            KernelKind::Linear => model.linear_kernel(),
            KernelKind::Gaussian => model.gaussian_kernel(self.params.gaussian_kernel_eps),
            KernelKind::Poly => model.polynomial_kernel(
                self.params.polynomial_kernel_constant,
                self.params.polynomial_kernel_degree,
            ),
        };

        let fitted = model
            .fit(&dataset)
            .map_err(|e| TuneError::Train(e.to_string()))?;
        self.model = Some(fitted);
        Ok(())
    }

    /// Predict boolean class labels.
    pub fn predict(&self, x: &Array2<f64>) -> Result<Array1<bool>, TuneError> {
        let model = self.model.as_ref().ok_or(TuneError::NotFitted)?;
        Ok(model.predict(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn separable_data() -> (Array2<f64>, Array1<bool>) {
        // Class separated by the first feature; second feature is noise.
        let x = Array2::from_shape_vec(
            (10, 2),
            vec![
                2.0, 0.1, //
                2.2, -0.3, //
                1.8, 0.2, //
                2.5, 0.0, //
                2.1, -0.1, //
                -2.0, 0.2, //
                -2.3, -0.2, //
                -1.9, 0.1, //
                -2.4, 0.3, //
                -2.1, 0.0,
            ],
        )
        .unwrap();
        let y = Array1::from_vec(vec![
            true, true, true, true, true, false, false, false, false, false,
        ]);
        (x, y)
    }

    #[test]
    fn linear_kernel_separates_classes() {
        let (x, y) = separable_data();
        let mut classifier = SvmClassifier::new(SvmHyperParams::default());
        assert_eq!(classifier.params().kernel, KernelKind::Linear);
        assert!(!classifier.is_fitted());

        classifier.fit(&x, &y).unwrap();
        assert!(classifier.is_fitted());
        let preds = classifier.predict(&x).unwrap();

        let correct = preds
            .iter()
            .zip(y.iter())
            .filter(|(p, t)| p == t)
            .count();
        assert!(correct >= 9, "expected near-perfect fit, got {}/10", correct);
    }

    #[test]
    fn predict_before_fit_is_an_error() {
        let (x, _) = separable_data();
        let classifier = SvmClassifier::new(SvmHyperParams::default());
        assert!(matches!(
            classifier.predict(&x),
            Err(TuneError::NotFitted)
        ));
    }

    #[test]
    fn fit_rejects_mismatched_labels() {
        let (x, _) = separable_data();
        let y_short = Array1::from_vec(vec![true, false]);
        let mut classifier = SvmClassifier::new(SvmHyperParams::default());
        assert!(classifier.fit(&x, &y_short).is_err());
    }
}
