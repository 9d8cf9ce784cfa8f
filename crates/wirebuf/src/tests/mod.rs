mod errors;
mod writes;
