// Copyright (c) 2025 Kharcha Contributors.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

pub mod add;
pub mod delete;
pub mod edit;
pub mod exporter;
pub mod list;
pub mod report;
pub mod settings;
