pub mod error;
pub mod interp;
pub mod opcode;
pub mod parser;
pub mod sift;
pub mod unroll;

pub use error::SyntaxError;
pub use interp::{run, run_traced, MergePoint, NoTrace};

pub fn compile(source: &str) -> Result<Vec<u8>, SyntaxError> {
    let sifted = sift::sift(source);
    let (code, depth) = parser::parse(&sifted);
    if depth > 0 {
        Err(SyntaxError::UnmatchedOpen(depth))
    } else if depth < 0 {
        Err(SyntaxError::UnmatchedClose(-depth))
    } else {
        Ok(code)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn compile_rejects_unbalanced_brackets() {
        assert_eq!(compile("[["), Err(SyntaxError::UnmatchedOpen(2)));
        assert_eq!(compile("]]"), Err(SyntaxError::UnmatchedClose(2)));
    }

    #[test]
    fn compile_accepts_balanced_programs() {
        assert!(compile("++[->++<]").is_ok());
    }
}
