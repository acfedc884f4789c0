//! Shared state for the relay router.

use std::sync::Arc;

use crate::classifier::ClassifierGateway;
use crate::locator::HospitalLocator;

/// Shared context for all relay routes: the classifier gateway and the
/// hospital locator, both behind their transport seams so tests swap
/// in doubles.
pub struct ApiContext<C, P> {
    pub classifier: Arc<ClassifierGateway<C>>,
    pub locator: Arc<HospitalLocator<P>>,
}

impl<C, P> ApiContext<C, P> {
    pub fn new(classifier: ClassifierGateway<C>, locator: HospitalLocator<P>) -> Self {
        Self {
            classifier: Arc::new(classifier),
            locator: Arc::new(locator),
        }
    }
}

// Manual impl: `#[derive(Clone)]` would require `C: Clone` and
// `P: Clone` even though both live behind an `Arc`.
impl<C, P> Clone for ApiContext<C, P> {
    fn clone(&self) -> Self {
        Self {
            classifier: Arc::clone(&self.classifier),
            locator: Arc::clone(&self.locator),
        }
    }
}
