pub mod client_rules;
