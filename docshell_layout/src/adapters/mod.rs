// Copyright 2025 the Docshell Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ready-made [`Host`](crate::ports::Host) implementations.

pub mod memory;
