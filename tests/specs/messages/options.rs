// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use fah_core::{ClientSubType, ClientType, CorePriority, MaxPacketSize, MessageError, Options};

use crate::prelude::*;

#[test]
fn client_7_4_options_map() {
    let options: Options = mapped("client-v7.4.4/options.txt");
    assert!(options.errors.is_empty(), "{:?}", options.errors);
    assert_eq!(options.user.as_deref(), Some("harlam357"));
    assert_eq!(options.team, Some(32));
    assert_eq!(options.passkey.as_deref(), Some(""));
    assert_eq!(options.client_type, ClientType::Normal);
    assert_eq!(options.client_subtype, ClientSubType::StdCli);
    assert_eq!(options.core_priority, CorePriority::Idle);
    assert_eq!(options.max_packet_size, MaxPacketSize::Normal);
    assert_eq!(options.smp, Some(true));
    assert_eq!(options.checkpoint, Some(15));
}

#[test]
fn missing_body_is_rejected_before_decoding() {
    for body in ["", "   \n"] {
        let err = parse::<Options>(body).unwrap_err();
        assert!(matches!(err, MessageError::Argument(_)), "{err}");
    }
}
