//! Property-based tests for record parsing.

use super::records::{parse_serial, parse_transport};
use crate::output::{IniFormatter, OutputFormatter, Records};
use crate::record::{Parity, Protocol, SerialConfig, TransportConfig};
use crate::store::RawConfigMap;
use proptest::prelude::*;

fn protocol_strategy() -> impl Strategy<Value = Protocol> {
    prop_oneof![Just(Protocol::Tcp), Just(Protocol::Udp)]
}

fn parity_strategy() -> impl Strategy<Value = Parity> {
    prop_oneof![Just(Parity::None), Just(Parity::Even), Just(Parity::Odd)]
}

// Values with no line breaks, so a generated pair stays on one line
fn ip_strategy() -> impl Strategy<Value = String> {
    "[^\r\n]{1,30}"
}

fn transport_strategy() -> impl Strategy<Value = TransportConfig> {
    (ip_strategy(), any::<u32>(), protocol_strategy()).prop_map(|(ip, port, protocol)| {
        TransportConfig { ip, port, protocol }
    })
}

fn serial_strategy() -> impl Strategy<Value = SerialConfig> {
    (any::<u32>(), any::<u32>(), parity_strategy(), any::<u32>()).prop_map(
        |(baudrate, data_bits, parity, stop_bits)| SerialConfig {
            baudrate,
            data_bits,
            parity,
            stop_bits,
        },
    )
}

// Unrelated keys: lowercase words that never collide with a required key
fn noise_strategy() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::vec(("x_[a-z]{1,8}", "[^\r\n]{0,10}"), 0..6)
}

fn render(records: &Records) -> String {
    IniFormatter.format(records).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 2000,
        .. ProptestConfig::default()
    })]

    // Valid records survive render -> load -> parse regardless of line order
    // and interleaved unrelated keys
    #[test]
    fn valid_records_parse_exactly(
        transport in transport_strategy(),
        serial in serial_strategy(),
        noise in noise_strategy(),
        seed in any::<u64>(),
    ) {
        let records = Records {
            transport: Some(transport.clone()),
            serial: Some(serial.clone()),
        };
        let mut lines: Vec<String> = render(&records).lines().map(str::to_string).collect();
        lines.extend(noise.into_iter().map(|(k, v)| format!("{k}={v}")));

        // Deterministic shuffle from the seed
        let len = lines.len();
        let mut state = seed;
        for i in (1..len).rev() {
            state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
            let j = usize::try_from(state >> 33).unwrap() % (i + 1);
            lines.swap(i, j);
        }

        let map = RawConfigMap::parse(&lines.join("\n"));
        prop_assert_eq!(parse_transport(&map).unwrap(), transport);
        prop_assert_eq!(parse_serial(&map).unwrap(), serial);
    }

    // Dropping any single required key fails the record
    #[test]
    fn missing_required_key_fails(
        transport in transport_strategy(),
        serial in serial_strategy(),
        drop_index in 0usize..7,
    ) {
        let records = Records {
            transport: Some(transport),
            serial: Some(serial),
        };
        let text: Vec<String> = render(&records)
            .lines()
            .enumerate()
            .filter(|(i, _)| *i != drop_index)
            .map(|(_, line)| line.to_string())
            .collect();
        let map = RawConfigMap::parse(&text.join("\n"));

        if drop_index < 3 {
            prop_assert!(parse_transport(&map).is_err());
            prop_assert!(parse_serial(&map).is_ok());
        } else {
            prop_assert!(parse_transport(&map).is_ok());
            prop_assert!(parse_serial(&map).is_err());
        }
    }

    // A non-digit anywhere in an integer field fails the record
    #[test]
    fn non_digit_port_fails(
        transport in transport_strategy(),
        junk in "[^0-9\r\n]{1,3}",
    ) {
        let mut map_text = render(&Records { transport: Some(transport.clone()), serial: None });
        map_text.push_str(&format!("\nport={}{junk}", transport.port));
        let map = RawConfigMap::parse(&map_text);
        prop_assert!(parse_transport(&map).is_err());
    }

    // Parsing is a pure function of the map
    #[test]
    fn parsing_is_idempotent(text in "[a-z_=0-9A-Z\n]{0,120}") {
        let map = RawConfigMap::parse(&text);
        prop_assert_eq!(
            format!("{:?}", parse_transport(&map)),
            format!("{:?}", parse_transport(&map))
        );
        prop_assert_eq!(
            format!("{:?}", parse_serial(&map)),
            format!("{:?}", parse_serial(&map))
        );
    }

    // Lines without '=' never reach the map
    #[test]
    fn lines_without_delimiter_are_ignored(lines in prop::collection::vec("[^=\r\n]{0,20}", 0..10)) {
        let map = RawConfigMap::parse(&lines.join("\n"));
        prop_assert!(map.is_empty());
    }
}
