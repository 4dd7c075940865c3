//! Login/signup form state.
//!
//! DESIGN
//! ======
//! One form toggles between login and signup. Field values survive a mode
//! switch, but the status message does not; a successful signup wipes the
//! fields and drops back to login mode.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use crate::net::types::{LoginRequest, SignupRequest};

pub const SIGNUP_SUCCESS: &str = "Signup successful! You can now log in.";
pub const LOGIN_SUCCESS: &str = "Login successful!";

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LoginMode {
    #[default]
    Login,
    Signup,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub mode: LoginMode,
    pub email: String,
    pub password: String,
    pub name: String,
    pub contact_number: String,
    pub message: Option<String>,
    pub busy: bool,
}

impl LoginForm {
    pub fn is_signup(&self) -> bool {
        self.mode == LoginMode::Signup
    }

    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            LoginMode::Login => LoginMode::Signup,
            LoginMode::Signup => LoginMode::Login,
        };
        self.message = None;
    }

    pub fn heading(&self) -> &'static str {
        match self.mode {
            LoginMode::Login => "Login",
            LoginMode::Signup => "Signup",
        }
    }

    pub fn submit_label(&self) -> &'static str {
        if self.busy { "Processing..." } else { self.heading() }
    }

    pub fn switch_prompt(&self) -> &'static str {
        match self.mode {
            LoginMode::Login => "Don't have an account? ",
            LoginMode::Signup => "Already have an account? ",
        }
    }

    pub fn switch_label(&self) -> &'static str {
        match self.mode {
            LoginMode::Login => "Signup",
            LoginMode::Signup => "Login",
        }
    }

    pub fn login_request(&self) -> LoginRequest {
        LoginRequest { email: self.email.trim().to_owned(), password: self.password.clone() }
    }

    pub fn signup_request(&self) -> SignupRequest {
        SignupRequest {
            email: self.email.trim().to_owned(),
            password: self.password.clone(),
            name: self.name.trim().to_owned(),
            contact_number: self.contact_number.trim().to_owned(),
        }
    }

    pub fn signup_succeeded(&mut self) {
        *self = Self { message: Some(SIGNUP_SUCCESS.to_owned()), ..Self::default() };
    }
}
