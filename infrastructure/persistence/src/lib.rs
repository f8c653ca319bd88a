pub mod bundle;
pub mod store {
    pub mod json_file;
    pub mod memory;
}
