//! Subscription form demo. The form is never sent: submitting only shows an acknowledgement.

use crate::prelude::*;

use crate::config::Selectors;
use crate::controller::notification::Notifier;
use crate::controller::subscribe::Submission;
use crate::view::notification::AlertNotifier;

use showcase_system_web::event;
use showcase_system_web::event::Slot;
use showcase_system_web::f;
use showcase_system_web::HtmlFormElement;
use showcase_system_web::HtmlInputElement;



// =============
// === Model ===
// =============

#[derive(Derivative)]
#[derivative(Debug(bound=""))]
struct Model<N> {
    logger   : Logger,
    form     : HtmlFormElement,
    email_id : String,
    #[derivative(Debug="ignore")]
    notifier : N,
}

impl<N:Notifier> Model<N> {
    fn email(&self) -> String {
        match web::get_element_by_id_as::<HtmlInputElement>(&self.email_id) {
            Ok(input) => input.value(),
            Err(err)  => {
                warning!(self.logger, "Cannot read the email: {}", err);
                default()
            }
        }
    }

    fn submit(&self) -> Submission {
        let submission = Submission::new(&self.email());
        self.notifier.notify(&submission.message());
        if let Submission::Accepted{email} = &submission {
            info!(self.logger, "Subscribed {}.", email);
            self.form.reset();
        }
        submission
    }
}



// ====================
// === Subscription ===
// ====================

/// The subscription form. Requires the form; the email input is read at submit time.
#[derive(Derivative)]
#[derivative(Debug(bound=""))]
pub struct Subscription<N=AlertNotifier> {
    model     : Rc<Model<N>>,
    on_submit : Slot<event::Submit>,
}

impl Subscription {
    /// Look up the form and register the submit listener. Messages are shown with an `alert`.
    pub fn new(logger:&Logger, selectors:&Selectors) -> FallibleResult<Self> {
        let notifier = AlertNotifier::new(logger);
        Self::new_with_notifier(logger,selectors,notifier)
    }
}

impl<N:Notifier+'static> Subscription<N> {
    /// Look up the form and register the submit listener. Messages go to the given notifier.
    pub fn new_with_notifier
    (logger:&Logger, selectors:&Selectors, notifier:N) -> FallibleResult<Self> {
        let logger   = logger.sub("Subscription");
        let form     = web::get_element_by_id_as::<HtmlFormElement>(&selectors.subscribe_form_id)?;
        let email_id = selectors.subscribe_email_id.clone();
        let model    = Rc::new(Model {logger,form,email_id,notifier});
        let on_submit = Slot::<event::Submit>::with_callback(&model.form,&model.logger,
            f!([model] (event:web_sys::Event) {
                event.prevent_default();
                model.submit();
            })
        );
        debug!(model.logger, "Initialized.");
        Ok(Self {model,on_submit})
    }

    /// Validate the current email and acknowledge it, as if the form was submitted.
    pub fn submit(&self) -> Submission {
        self.model.submit()
    }
}
