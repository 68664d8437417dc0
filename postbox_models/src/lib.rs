pub mod contact_form;
pub mod email_address;
mod macros;
