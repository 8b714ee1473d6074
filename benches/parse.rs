// benches/parse.rs
use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lookbook::catalog;
use lookbook::csv::{Delim, Table};

fn synthetic_feed(rows: usize) -> String {
    let mut text = String::from("id,name,pleat,type,style,color,size,price,sold,image,description\n");
    for i in 0..rows {
        text.push_str(&format!(
            "{:03},Piece {i},Accordion,Skirt,\"Formal, Evening\",Indigo,\"S-M, L\",CHF {}.50,{},https://cdn.example/{i}.jpg,\"pleated,\nnaturally dyed\"\n",
            i,
            80 + (i % 300),
            if i % 7 == 0 { "yes" } else { "" },
        ));
    }
    text
}

fn bench_parse(c: &mut Criterion) {
    let feed = synthetic_feed(500);

    c.bench_function("parse_table_500", |b| {
        b.iter(|| {
            let table = Table::from_text(black_box(&feed), Delim::Csv);
            black_box(table.row_count())
        })
    });

    c.bench_function("build_catalog_500", |b| {
        let table = Table::from_text(&feed, Delim::Csv);
        b.iter(|| {
            let cat = catalog::build(black_box(&table));
            black_box(cat.records.len())
        })
    });
}

criterion_group!(benches, bench_parse);
criterion_main!(benches);
