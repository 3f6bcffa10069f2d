// Dweve SORBench - SOR benchmark result aggregation
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Run identity: the composite keys of the aggregation store.
//!
//! [`ArraySize`] names the 3D problem domain a benchmark ran against and
//! [`Meta`] names the configuration of the run. Both are plain value types
//! with structural equality, hashing and ordering, so they can be used
//! directly as map keys and sort keys.

use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Dimensions `(I, J, K)` of a benchmark problem domain.
///
/// The derived ordering compares `I`, then `J`, then `K`.
///
/// # Examples
///
/// ```
/// use sorbench_core::ArraySize;
///
/// let size: ArraySize = "512_512_256".parse().unwrap();
/// assert_eq!(size, ArraySize::new(512, 512, 256));
/// assert_eq!(size.to_string(), "512_512_256");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArraySize {
    #[serde(rename = "I")]
    pub i: u32,
    #[serde(rename = "J")]
    pub j: u32,
    #[serde(rename = "K")]
    pub k: u32,
}

impl ArraySize {
    pub fn new(i: u32, j: u32, k: u32) -> Self {
        Self { i, j, k }
    }
}

impl fmt::Display for ArraySize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}_{}", self.i, self.j, self.k)
    }
}

impl FromStr for ArraySize {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split('_').collect();
        if parts.len() != 3 {
            return Err(CoreError::invalid_size(s, "expected three components"));
        }

        let mut dims = [0u32; 3];
        for (dim, part) in dims.iter_mut().zip(&parts) {
            *dim = part
                .parse()
                .map_err(|e| CoreError::invalid_size(s, format!("'{}': {}", part, e)))?;
            if *dim == 0 {
                return Err(CoreError::invalid_size(s, "dimensions must be positive"));
            }
        }

        Ok(Self::new(dims[0], dims[1], dims[2]))
    }
}

/// The solver variant that produced a log.
///
/// Serialized as its integer discriminant, which is also the value written to
/// the `method` CSV column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
#[repr(u8)]
pub enum Method {
    Reference = 0,
    Mpi = 1,
    ArgoV1 = 2,
    ArgoV2 = 3,
    ArgoV3 = 4,
}

impl Method {
    /// Number of method variants.
    pub const COUNT: usize = 5;

    /// All methods in discriminant order.
    pub const ALL: [Method; Method::COUNT] = [
        Method::Reference,
        Method::Mpi,
        Method::ArgoV1,
        Method::ArgoV2,
        Method::ArgoV3,
    ];

    /// Map an Argo version number (1, 2 or 3) to its method.
    ///
    /// ```
    /// use sorbench_core::Method;
    ///
    /// assert_eq!(Method::argo(2), Some(Method::ArgoV2));
    /// assert_eq!(Method::argo(4), None);
    /// ```
    pub fn argo(version: u32) -> Option<Method> {
        match version {
            1 => Some(Method::ArgoV1),
            2 => Some(Method::ArgoV2),
            3 => Some(Method::ArgoV3),
            _ => None,
        }
    }

    pub fn as_u8(self) -> u8 {
        self as u8
    }

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Method::Reference => "reference",
            Method::Mpi => "mpi",
            Method::ArgoV1 => "argo-v1",
            Method::ArgoV2 => "argo-v2",
            Method::ArgoV3 => "argo-v3",
        }
    }

    pub fn is_argo(self) -> bool {
        matches!(self, Method::ArgoV1 | Method::ArgoV2 | Method::ArgoV3)
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Method {
    type Error = CoreError;

    fn try_from(value: u8) -> Result<Self> {
        Method::ALL
            .get(usize::from(value))
            .copied()
            .ok_or(CoreError::UnknownMethod(value))
    }
}

impl From<Method> for u8 {
    fn from(method: Method) -> u8 {
        method.as_u8()
    }
}

/// Configuration of one benchmark run.
///
/// Two `Meta` values identify the same run iff all five fields match. The
/// derived ordering is lexicographic over the fields in declaration order,
/// with `optimized == false` sorting before `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Meta {
    pub method: Method,
    pub optimized: bool,
    /// Process count for MPI, node count for Argo, 1 for the reference run.
    pub node_count: u32,
    pub dsm_nx: u32,
    pub dsm_ny: u32,
}

impl Meta {
    pub fn reference(optimized: bool) -> Self {
        Self {
            method: Method::Reference,
            optimized,
            node_count: 1,
            dsm_nx: 0,
            dsm_ny: 0,
        }
    }

    pub fn mpi(optimized: bool, processes: u32) -> Self {
        Self {
            method: Method::Mpi,
            optimized,
            node_count: processes,
            dsm_nx: 0,
            dsm_ny: 0,
        }
    }

    pub fn argo(method: Method, optimized: bool, nodes: u32, dsm_nx: u32, dsm_ny: u32) -> Self {
        debug_assert!(method.is_argo());
        Self {
            method,
            optimized,
            node_count: nodes,
            dsm_nx,
            dsm_ny,
        }
    }
}

impl fmt::Display for Meta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} optimized={} nodes={} dsm={}x{}",
            self.method, self.optimized, self.node_count, self.dsm_nx, self.dsm_ny
        )
    }
}

/// Per-method optimization flags for one results root, indexed by [`Method`].
///
/// # Examples
///
/// ```
/// use sorbench_core::{Method, OptimizationFlags};
///
/// let flags = OptimizationFlags::new([false, false, true, true, true]);
/// assert!(!flags.get(Method::Mpi));
/// assert!(flags.get(Method::ArgoV2));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptimizationFlags([bool; Method::COUNT]);

impl OptimizationFlags {
    pub const fn new(flags: [bool; Method::COUNT]) -> Self {
        Self(flags)
    }

    pub fn get(&self, method: Method) -> bool {
        self.0[method.index()]
    }

    /// Flags for the three Argo slots, v1 first.
    pub fn argo_slots(&self) -> [bool; 3] {
        [
            self.get(Method::ArgoV1),
            self.get(Method::ArgoV2),
            self.get(Method::ArgoV3),
        ]
    }

    pub fn as_array(&self) -> [bool; Method::COUNT] {
        self.0
    }
}
