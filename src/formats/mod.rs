// SPDX-License-Identifier: Apache-2.0
// Copyright (C) 2021 Profian, Inc.

mod addon;
mod repository;

pub use self::addon::AddonConfig;
pub use self::repository::RepositoryManifest;
