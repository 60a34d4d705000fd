use criterion::{criterion_group, criterion_main, Criterion};
use serde_json::json;

use remote_invoker::domains::{Context, Envelope, Scope};
use remote_invoker::factories::serializer_factory::SerializerFactory;
use remote_invoker::interfaces::serializer::{FormatType, Serializer};

fn sample_envelope() -> Envelope {
    let mut context = Context::new();
    for i in 0..8 {
        context.set_property(format!("header-{i}"), Scope::In, json!(i));
    }
    let lines: Vec<_> = (0..32)
        .map(|i| json!({"sku": format!("SKU-{i}"), "qty": i}))
        .collect();
    Envelope::new()
        .set_domain("orders")
        .set_service("OrderService")
        .set_content(Some(json!({"id": "o-1", "lines": lines})))
        .set_context(context)
}

fn bench_envelope_codec(c: &mut Criterion) {
    let envelope = sample_envelope();
    let mut group = c.benchmark_group("envelope_codec");

    for format in [FormatType::Json, FormatType::MsgPack] {
        let serializer = SerializerFactory::create(format);
        let mut wire = Vec::new();
        serializer.serialize(&envelope, &mut wire).unwrap();

        group.bench_function(format!("{format}_encode"), |b| {
            b.iter(|| {
                let mut out = Vec::with_capacity(wire.len());
                serializer.serialize(&envelope, &mut out).unwrap();
                out
            })
        });
        group.bench_function(format!("{format}_decode"), |b| {
            b.iter(|| {
                serializer
                    .deserialize::<Envelope, _>(wire.as_slice())
                    .unwrap()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_envelope_codec);
criterion_main!(benches);
