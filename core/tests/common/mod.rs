// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Common test utilities for integration tests.


#[allow(unused_imports)]
pub use fixtures::{dates, dt, recurrence};
