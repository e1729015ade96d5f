use criterion::{Criterion, Throughput, black_box, criterion_group, criterion_main};
use vehicle_csv_import::VehicleCsvParser;
use vehicle_csv_import::constants::columns;

/// Generate an import file where every tenth row has a problem
fn generate_csv(rows: usize) -> String {
    let mut lines = vec![columns::ALL.join(",")];

    for i in 0..rows {
        let vehicle_type = if i % 10 == 9 { "avion" } else { "carro" };
        let range = if i % 10 == 4 { "-10" } else { "420" };
        lines.push(format!(
            "Modelo {i},Marca {},{vehicle_type},{},Bogotá,disponible,{range},6 horas,60 kWh,años,5,180,150,\"Sedán, versión {i}\",\"GPS,Bluetooth,Cámara\"",
            i % 7,
            90_000_000 + i * 1_000,
        ));
    }

    lines.join("\n")
}

fn bench_parse(c: &mut Criterion) {
    let content = generate_csv(1_000);
    let parser = VehicleCsvParser::default();

    let mut group = c.benchmark_group("vehicle_csv_parser");
    group.throughput(Throughput::Bytes(content.len() as u64));
    group.bench_function("parse_1000_rows", |b| {
        b.iter(|| parser.parse(black_box(&content)))
    });
    group.finish();
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
