// Copyright 2025 Eric Jingryd (tidynest@proton.me)
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

//! Core module tests
//!
//! Contains test suites for core functionality:
//! - Account book tests (insert, uniqueness, paging, search)
//! - Details modal tests (rendering and click contract)
//! - Route table and history tests
//! - Add-account validation tests

#[cfg(test)]
mod book_tests;
#[cfg(test)]
mod modal_tests;
#[cfg(test)]
mod router_tests;
#[cfg(test)]
mod validator_tests;
