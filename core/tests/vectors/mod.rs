// SPDX-FileCopyrightText: 2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

//! Expansion vectors: known rules with hand-checked occurrence lists.

mod rfc5545;
mod scenarios;
mod sub_daily;
