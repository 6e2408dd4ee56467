use std::rc::Rc;

use gloo_timers::callback::Timeout;

use common::generation::ContentGenerator;
use common::workspace::EventWorkspace;

use super::generator::MockGenerator;

pub struct CreateEventComponent {
    pub workspace: EventWorkspace,

    /// Port used by the assistant panel.
    pub generator: Rc<dyn ContentGenerator>,

    /// Pending auto save; dropping it cancels the timer.
    pub auto_save_timer: Option<Timeout>,
}

impl CreateEventComponent {
    pub fn new() -> Self {
        Self::with_generator(Rc::new(MockGenerator::default()))
    }

    pub fn with_generator(generator: Rc<dyn ContentGenerator>) -> Self {
        Self {
            workspace: EventWorkspace::new(),
            generator,
            auto_save_timer: None,
        }
    }
}
