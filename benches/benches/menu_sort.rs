// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use understory_menu::{Menu, MenuItemTemplate};
use understory_menu_sort::{Descriptor, sort_entries};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
    fn below(&mut self, n: usize) -> usize {
        (self.next_u64() % n as u64) as usize
    }
}

fn id(i: usize) -> String {
    format!("item{i}")
}

/// Groups of `per_group` items with no references at all.
fn gen_plain(groups: usize, per_group: usize) -> Vec<Descriptor> {
    let mut out = Vec::with_capacity(groups * (per_group + 1));
    for g in 0..groups {
        if g > 0 {
            out.push(Descriptor::separator());
        }
        for i in 0..per_group {
            out.push(Descriptor::item(id(g * per_group + i)));
        }
    }
    out
}

/// Plugin-style menus: every item may point at a random other item.
fn gen_random_refs(groups: usize, per_group: usize, seed: u64) -> Vec<Descriptor> {
    let total = groups * per_group;
    let mut rng = Rng::new(seed);
    let mut out = Vec::with_capacity(groups * (per_group + 1));
    for g in 0..groups {
        if g > 0 {
            out.push(Descriptor::separator());
        }
        for i in 0..per_group {
            let mut d = Descriptor::item(id(g * per_group + i));
            match rng.below(6) {
                0 => d = d.with_after([id(rng.below(total))]),
                1 => d = d.with_before([id(rng.below(total))]),
                2 => d = d.with_after_group([id(rng.below(total))]),
                3 => d = d.with_before_group([id(rng.below(total))]),
                _ => {}
            }
            out.push(d);
        }
    }
    out
}

/// Every group's last item points at the previous group: the worst case for merging.
fn gen_merge_chain(groups: usize, per_group: usize) -> Vec<Descriptor> {
    let mut out = gen_plain(groups, per_group);
    for e in &mut out {
        if let Some(own) = e.id.as_deref() {
            let n: usize = own.trim_start_matches("item").parse().unwrap_or(0);
            if n >= per_group && n % per_group == per_group - 1 {
                e.after.push(id(n - per_group));
            }
        }
    }
    out
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort_entries");
    for &(groups, per_group) in &[(4usize, 8usize), (16, 16), (64, 16)] {
        let n = (groups * per_group) as u64;
        group.throughput(Throughput::Elements(n));

        let plain = gen_plain(groups, per_group);
        group.bench_function(format!("plain_g{groups}_n{n}"), |b| {
            b.iter(|| black_box(sort_entries(&plain)))
        });

        let random = gen_random_refs(groups, per_group, 0xCAFE_F00D_DEAD_BEEF);
        group.bench_function(format!("random_refs_g{groups}_n{n}"), |b| {
            b.iter(|| black_box(sort_entries(&random)))
        });

        let chain = gen_merge_chain(groups, per_group);
        group.bench_function(format!("merge_chain_g{groups}_n{n}"), |b| {
            b.iter(|| black_box(sort_entries(&chain)))
        });
    }
    group.finish();
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("menu_build");
    let template: Vec<MenuItemTemplate> = (0..64)
        .map(|i| {
            let t = MenuItemTemplate::new(format!("Item {i}")).with_id(id(i));
            match i % 8 {
                0 if i > 0 => MenuItemTemplate::separator(),
                3 => t.with_after([id(i / 2)]),
                5 => t.with_submenu(vec![
                    MenuItemTemplate::new("a").with_id(format!("{i}a")),
                    MenuItemTemplate::new("b").with_before([format!("{i}a")]),
                ]),
                _ => t,
            }
        })
        .collect();
    group.throughput(Throughput::Elements(template.len() as u64));
    group.bench_function("build_from_template_64", |b| {
        b.iter_batched(
            || template.clone(),
            |t| black_box(Menu::build_from_template(&t)),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_sort, bench_build);
criterion_main!(benches);
