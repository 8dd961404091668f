pub mod extract_text;


pub use extract_text::ExtractTextUseCase;
