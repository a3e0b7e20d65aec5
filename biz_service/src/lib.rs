pub mod biz_services;
pub mod entitys;
pub mod repository;
pub mod validation;
