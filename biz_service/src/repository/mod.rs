pub mod client_repository;
