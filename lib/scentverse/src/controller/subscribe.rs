//! Subscription form demo. Nothing is sent anywhere: the form only acknowledges the address.



/// Message shown when the form is submitted without an email.
pub const EMPTY_EMAIL_MESSAGE : &str = "Please enter an email.";

/// Message shown after a successful submission.
pub fn subscribed_message(email:&str) -> String {
    format!("Thanks! {} has been subscribed to the Scent Circle.", email)
}

/// Result of validating a submission.
#[derive(Clone,Debug,Eq,PartialEq)]
pub enum Submission {
    /// The email is blank. The form must stay untouched.
    Rejected,
    /// The email was accepted. The form should be reset.
    Accepted {
        /// The trimmed address.
        email : String,
    },
}

impl Submission {
    /// Validate the raw value of the email input.
    pub fn new(email:&str) -> Self {
        let email = email.trim();
        if email.is_empty() { Self::Rejected } else {
            let email = email.to_string();
            Self::Accepted {email}
        }
    }

    /// The message the user should see.
    pub fn message(&self) -> String {
        match self {
            Self::Rejected        => EMPTY_EMAIL_MESSAGE.to_string(),
            Self::Accepted{email} => subscribed_message(email),
        }
    }
}



// =============
// === Tests ===
// =============
