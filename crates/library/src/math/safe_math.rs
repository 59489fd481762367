use anchor_lang::prelude::*;
use num_traits::{CheckedAdd, CheckedSub};
use std::panic::Location;

// Copyright 2021 Drift Labs
// Copyright 2025 INSTADAPP LABS INC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

// Portions of this code are derived from Drift Protocol
// Original source: https://github.com/drift-labs/protocol-v2/blob/master/programs/drift/src/math/safe_math.rs
// Modified by INSTADAPP LABS INC

use crate::errors::{ErrorCodes, FluidResult};

/// Checked arithmetic that reports the failing call site before erroring.
pub trait SafeMath: Sized {
    fn safe_add(self, rhs: Self) -> FluidResult<Self>;
    fn safe_sub(self, rhs: Self) -> FluidResult<Self>;
}

#[track_caller]
#[inline(always)]
fn math_error<T>(kind: &str, error: ErrorCodes) -> FluidResult<T> {
    let caller = Location::caller();
    msg!(
        "Math {} thrown at {}:{}",
        kind,
        caller.file(),
        caller.line()
    );
    Err(error)
}

impl<T> SafeMath for T
where
    T: CheckedAdd + CheckedSub + Copy,
{
    #[track_caller]
    #[inline(always)]
    fn safe_add(self, v: T) -> FluidResult<T> {
        match self.checked_add(&v) {
            Some(result) => Ok(result),
            None => math_error("overflow", ErrorCodes::LibraryMathOverflow),
        }
    }

    #[track_caller]
    #[inline(always)]
    fn safe_sub(self, v: T) -> FluidResult<T> {
        match self.checked_sub(&v) {
            Some(result) => Ok(result),
            None => math_error("underflow", ErrorCodes::LibraryMathUnderflow),
        }
    }
}
