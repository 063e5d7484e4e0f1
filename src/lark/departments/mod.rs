//! Departments module - create, read, update and delete departments

mod api;
mod models;

pub use models::{
    Department, DepartmentFields, DepartmentLeader, DepartmentStatus, DepartmentUpdateIdRequest,
};
