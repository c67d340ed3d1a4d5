// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Message fixtures mapped onto their model types.

mod caller_types;
mod info;
mod options;
mod simulation;
mod slots;
mod units;
