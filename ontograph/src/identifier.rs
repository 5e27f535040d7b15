/*
 * Copyright © 2025 Volodymyr Kadzhaia
 * Copyright © 2025 Pieter Bonte
 * KU Leuven — Stream Intelligence Lab, Belgium
 *
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this file,
 * you can obtain one at https://mozilla.org/MPL/2.0/.
 */

use shared::terms::BLANK_NODE_PREFIX;

/// Local identifier of a resource: the part after the last `#` or `/`,
/// whichever comes later.
///
/// Blank node ids (`_:b0`) come back unchanged, as does any input with no
/// separator or with the separator as its final character. Distinct IRIs
/// sharing a fragment map to the same id.
pub fn local_id(uri: &str) -> &str {
    if uri.starts_with(BLANK_NODE_PREFIX) {
        return uri;
    }
    match uri.rfind(|c| c == '#' || c == '/') {
        Some(pos) if pos + 1 < uri.len() => &uri[pos + 1..],
        _ => uri,
    }
}
