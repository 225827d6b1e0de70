mod common;

mod home_assembly;
