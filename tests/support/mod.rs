#![allow(dead_code)]

pub mod fraudlens_env;
