//! Test utilities for easel_storage tests.

#![allow(dead_code)]

pub mod http_stub;
