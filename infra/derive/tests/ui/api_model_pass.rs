use mfit_derive::api_model;

#[api_model]
pub struct SignUp {
    pub display_name: String,
}

#[api_model(rename_all = "snake_case", deny_unknown_fields = false)]
pub struct Envelope {
    pub error_message: Option<String>,
}

fn main() {}
