use anchor_lang::prelude::*;

pub type FluidResult<T = ()> = std::result::Result<T, ErrorCodes>;

#[error_code]
pub enum ErrorCodes {
    #[msg(LIBRARY_MATH_OVERFLOW)]
    LibraryMathOverflow,

    #[msg(LIBRARY_MATH_UNDERFLOW)]
    LibraryMathUnderflow,

    #[msg(LIBRARY_PDA_DERIVATION_FAILED)]
    LibraryPdaDerivationFailed,

    #[msg(LIBRARY_ACCOUNT_NOT_WRITABLE)]
    LibraryAccountNotWritable,
}
