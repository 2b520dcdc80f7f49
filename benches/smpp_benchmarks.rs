// ABOUTME: Benchmark suite for PDU building and frame serialization
// ABOUTME: Measures field validation, frame writing and buffer reuse across message sizes

use bytes::{Bytes, BytesMut};
use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use smpp_pdu::datatypes::*;
use smpp_pdu::{Encodable, FieldId, Header, PduBuilder};
use std::time::Duration;

fn create_sample_submit_sm(message: &[u8]) -> PduBuilder {
    let mut pdu = PduBuilder::submit_sm(Header::request(CommandId::SubmitSm, 1), None)
        .expect("submit_sm header");
    pdu.set_field(FieldId::SourceAddr, "12345")
        .and_then(|pdu| pdu.set_field(FieldId::DestinationAddr, "67890"))
        .and_then(|pdu| pdu.set_field(FieldId::PriorityFlag, PriorityFlag::Level0))
        .and_then(|pdu| pdu.set_field(FieldId::ShortMessage, FieldValue::raw(message.to_vec())))
        .expect("submit_sm fields");
    pdu
}

fn create_sample_bind_transmitter() -> PduBuilder {
    let mut pdu = PduBuilder::bind(Header::request(CommandId::BindTransmitter, 1), None)
        .expect("bind header");
    pdu.set_field(FieldId::SystemId, "test_system")
        .and_then(|pdu| pdu.set_field(FieldId::Password, "password"))
        .and_then(|pdu| pdu.set_field(FieldId::InterfaceVersion, InterfaceVersion::SmppV34))
        .expect("bind fields");
    pdu
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("build");
    group.measurement_time(Duration::from_secs(10));

    group.bench_function("submit_sm", |b| {
        b.iter(|| create_sample_submit_sm(black_box(b"Hello World")))
    });

    group.bench_function("bind_transmitter", |b| b.iter(create_sample_bind_transmitter));

    group.bench_function("enquire_link", |b| {
        b.iter(|| PduBuilder::enquire_link(black_box(Header::request(CommandId::EnquireLink, 1))))
    });

    group.finish();
}

fn bench_serialization(c: &mut Criterion) {
    let mut group = c.benchmark_group("serialization");
    group.measurement_time(Duration::from_secs(10));

    let submit_sm = create_sample_submit_sm(b"Hello World");
    group.bench_function("submit_sm", |b| b.iter(|| black_box(&submit_sm).to_bytes()));

    let bind = create_sample_bind_transmitter();
    group.bench_function("bind_transmitter", |b| b.iter(|| black_box(&bind).to_bytes()));

    let mut with_tlvs = create_sample_submit_sm(b"");
    with_tlvs
        .set_tlv_field(tags::MESSAGE_PAYLOAD, Bytes::from(vec![b'x'; 512]))
        .and_then(|pdu| pdu.set_tlv_field(tags::USER_MESSAGE_REFERENCE, Bytes::from_static(&[0, 1])))
        .expect("tlvs");
    group.bench_function("submit_sm_with_tlvs", |b| {
        b.iter(|| black_box(&with_tlvs).to_bytes())
    });

    let enquire_link =
        PduBuilder::enquire_link(Header::request(CommandId::EnquireLink, 1)).expect("header");
    group.bench_function("enquire_link", |b| b.iter(|| black_box(&enquire_link).to_bytes()));

    group.finish();
}

fn bench_message_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("message_sizes");
    group.measurement_time(Duration::from_secs(10));

    for size in [10usize, 50, 100, 160, 254] {
        let message = vec![b'A'; size];
        let pdu = create_sample_submit_sm(&message);
        group.bench_with_input(BenchmarkId::new("submit_sm", size), &pdu, |b, pdu| {
            b.iter(|| black_box(pdu).to_bytes())
        });
    }

    group.finish();
}

fn bench_buffer_reuse(c: &mut Criterion) {
    let mut group = c.benchmark_group("buffer_reuse");
    group.measurement_time(Duration::from_secs(10));

    let pdu = create_sample_submit_sm(b"Hello World");
    group.bench_function("encode_into_shared_buffer", |b| {
        let mut buf = BytesMut::with_capacity(4096);
        b.iter(|| {
            buf.clear();
            for _ in 0..16 {
                black_box(&pdu).encode(&mut buf);
            }
            black_box(buf.len())
        })
    });

    group.finish();
}

criterion_group!(
    benches,
    bench_build,
    bench_serialization,
    bench_message_sizes,
    bench_buffer_reuse
);
criterion_main!(benches);
