pub mod objectives_model;
pub mod objectives_repository;
pub mod objectives_service;
pub mod objectives_traits;
