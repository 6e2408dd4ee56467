pub mod submit_options;
