// SPDX-License-Identifier: MIT

//! Placeholder crate root. The spec tests in `cli/` are compiled as
//! `[[test]]` targets of the `rdm` cli crate.
