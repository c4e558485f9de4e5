// (C) Copyright IBM Corp. 2024.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//      http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Storage options.
//!
//! Options arrive as a loosely typed [`RawOptions`] bag and are turned into a
//! [`ConnectionDescriptor`] by a single validation pass. Nothing downstream
//! looks at the raw options again.

mod descriptor;
mod options;
mod validation;

pub use descriptor::{
    CollectionOptions, ConnectionDescriptor, ItemOptions, DEFAULT_PAGE_PARAMETER,
};
pub use options::{OptionValue, RawOptions};
pub use validation::validate_options;
