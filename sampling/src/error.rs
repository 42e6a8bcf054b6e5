// Copyright (c) 2024 RBB S.r.l
// opensource@mintlayer.org
// SPDX-License-Identifier: MIT
// Licensed under the MIT License;
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://spdx.org/licenses/MIT
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

#[derive(thiserror::Error, Debug, PartialEq, Eq, Clone)]
pub enum Error {
    #[error("Invalid range: the upper bound {1} is not greater than the lower bound {0}")]
    InvalidRange(i64, i64),
    #[error("Sample of size {0} requested from a sequence of length {1}")]
    SampleSizeExceeded(usize, usize),
    #[error("Attempt to draw an element from an empty sequence")]
    EmptySequence,
}

pub type Result<T> = core::result::Result<T, Error>;
