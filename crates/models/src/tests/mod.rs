/// CRUD operations tests for the product entity
pub mod crud_tests;
