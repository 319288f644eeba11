mod determinism;
mod layout;
mod properties;
