use super::packet::*;
use crate::error::IammeError;
use dhcproto::{v4, Decodable, Decoder};
use std::net::Ipv4Addr;

fn sample_packet() -> AnnouncePacket {
    let mut packet = AnnouncePacket::new();
    packet
        .set_chaddr(MacAddr::new([0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]))
        .set_ciaddr(Ipv4Addr::new(192, 168, 1, 42))
        .set_hostname(Hostname::new("myhost").unwrap());
    packet
}

#[test]
fn test_layout_constants() {
    assert_eq!(OPTIONS_OFFSET, 236);
    assert_eq!(MESSAGE_TYPE_OFFSET, 240);
    assert_eq!(HOSTNAME_OFFSET, 243);
    assert_eq!(END_OFFSET, 309);
    assert_eq!(PACKET_LEN, 310);
}

#[test]
fn test_announce_scenario() {
    let bytes = sample_packet().encode();

    assert_eq!(bytes.len(), PACKET_LEN);
    assert_eq!(
        &bytes[CHADDR_OFFSET..CHADDR_OFFSET + 6],
        &[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]
    );
    assert_eq!(&bytes[OPTIONS_OFFSET..OPTIONS_OFFSET + 4], &MAGIC_COOKIE);
    assert_eq!(bytes[HOSTNAME_OFFSET + 1], 6);
    assert_eq!(&bytes[HOSTNAME_OFFSET + 2..HOSTNAME_OFFSET + 8], b"myhost");
}

#[test]
fn test_fixed_header_fields() {
    let bytes = sample_packet().encode();

    assert_eq!(&bytes[0..4], &[BOOTREQUEST, HTYPE_ETHERNET, 6, 0]);
    // xid in network byte order
    assert_eq!(&bytes[4..8], &[0x00, 0x01, 0x70, 0x1d]);
    assert_eq!(&bytes[8..12], &[0; 4]);
    assert_eq!(&bytes[12..16], &[192, 168, 1, 42]);
    assert!(bytes[16..28].iter().all(|&b| b == 0));
}

#[test]
fn test_unused_fields_are_zero() {
    let bytes = sample_packet().encode();

    assert!(bytes[CHADDR_OFFSET + 6..CHADDR_OFFSET + CHADDR_LEN]
        .iter()
        .all(|&b| b == 0));
    assert!(bytes[CHADDR_OFFSET + CHADDR_LEN..OPTIONS_OFFSET]
        .iter()
        .all(|&b| b == 0));
}

#[test]
fn test_option_positions_do_not_depend_on_input() {
    let mut long = AnnouncePacket::new();
    long.set_hostname(Hostname::new("h".repeat(HOST_NAME_MAX)).unwrap());

    for packet in [AnnouncePacket::new(), sample_packet(), long] {
        let bytes = packet.encode();
        assert_eq!(bytes.len(), PACKET_LEN);
        assert_eq!(&bytes[OPTIONS_OFFSET..OPTIONS_OFFSET + 4], &MAGIC_COOKIE);
        assert_eq!(
            &bytes[MESSAGE_TYPE_OFFSET..MESSAGE_TYPE_OFFSET + 3],
            &[OPT_MESSAGE_TYPE, 1, DHCPREQUEST]
        );
        assert_eq!(bytes[HOSTNAME_OFFSET], OPT_HOSTNAME);
        assert_eq!(bytes[END_OFFSET], OPT_END);
    }
}

#[test]
fn test_hostname_padding() {
    let bytes = sample_packet().encode();
    let name_field = &bytes[HOSTNAME_OFFSET + 2..END_OFFSET];

    assert_eq!(name_field.len(), HOST_NAME_MAX);
    assert_eq!(&name_field[..6], b"myhost");
    assert!(name_field[6..].iter().all(|&b| b == 0));
}

#[test]
fn test_full_length_hostname() {
    let name = "x".repeat(HOST_NAME_MAX);
    let mut packet = AnnouncePacket::new();
    packet.set_hostname(Hostname::new(name.clone()).unwrap());
    let bytes = packet.encode();

    assert_eq!(bytes[HOSTNAME_OFFSET + 1] as usize, HOST_NAME_MAX);
    assert_eq!(&bytes[HOSTNAME_OFFSET + 2..END_OFFSET], name.as_bytes());
}

#[test]
fn test_hostname_too_long() {
    let err = Hostname::new("x".repeat(HOST_NAME_MAX + 1)).unwrap_err();
    assert!(matches!(
        err,
        IammeError::HostnameTooLong { len: 65, max: HOST_NAME_MAX }
    ));
}

#[test]
fn test_default_packet() {
    let packet = AnnouncePacket::new();
    assert_eq!(packet.xid(), IAMME_XID);
    assert_eq!(packet.ciaddr(), Ipv4Addr::UNSPECIFIED);
    assert!(packet.hostname().is_empty());

    let bytes = packet.encode();
    assert_eq!(&bytes[12..16], &[0; 4]);
    assert_eq!(bytes[HOSTNAME_OFFSET + 1], 0);
}

#[test]
fn test_decodes_as_dhcp_request() {
    let packet = sample_packet().encode();

    let mut decoder = Decoder::new(&packet);
    let msg = v4::Message::decode(&mut decoder).unwrap();

    assert_eq!(msg.opcode(), v4::Opcode::BootRequest);
    assert_eq!(msg.xid(), IAMME_XID);
    assert_eq!(msg.chaddr(), &[0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff][..]);
    assert_eq!(msg.ciaddr(), Ipv4Addr::new(192, 168, 1, 42));
    assert!(!msg.flags().broadcast());

    let msg_type = msg.opts().get(v4::OptionCode::MessageType);
    assert!(matches!(
        msg_type,
        Some(v4::DhcpOption::MessageType(v4::MessageType::Request))
    ));

    let hostname = msg.opts().get(v4::OptionCode::Hostname);
    assert!(matches!(hostname, Some(v4::DhcpOption::Hostname(name)) if name == "myhost"));
}

#[test]
fn test_parse_mac_address() {
    let mac: MacAddr = "0a:1b:2c:3d:4e:5f\n".parse().unwrap();
    assert_eq!(mac.octets(), [0x0a, 0x1b, 0x2c, 0x3d, 0x4e, 0x5f]);

    let upper: MacAddr = "AA:BB:CC:DD:EE:FF".parse().unwrap();
    assert_eq!(upper.octets(), [0xaa, 0xbb, 0xcc, 0xdd, 0xee, 0xff]);
}

#[test]
fn test_parse_mac_address_rejects_malformed() {
    for bad in [
        "",
        "aa:bb:cc:dd:ee",
        "aa:bb:cc:dd:ee:ff:00",
        "aa:bb:cc:dd:ee:zz",
        "aabb:cc:dd:ee:ff",
        "a:bb:cc:dd:ee:ff",
    ] {
        assert!(
            matches!(bad.parse::<MacAddr>(), Err(IammeError::MacParse(_))),
            "accepted {bad:?}"
        );
    }
}

#[test]
fn test_mac_address_display() {
    let mac = MacAddr::new([0x00, 0x0c, 0x29, 0xa8, 0x92, 0xf4]);
    assert_eq!(mac.to_string(), "00:0c:29:a8:92:f4");
}
