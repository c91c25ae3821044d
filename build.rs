// Copyright © 2025 Potato Util. All rights reserved.
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Build script that verifies the toolchain meets the minimum supported
//! Rust version declared in `Cargo.toml`.

/// Minimum supported Rust version for this crate.
const MSRV: &str = "1.56.0";

fn main() {
    if version_check::is_min_version(MSRV) != Some(true) {
        eprintln!("'potato-util' requires rustc >= {}", MSRV);
        std::process::exit(1);
    }
}
