use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use std::collections::BTreeMap;

use avl::Tree;

#[derive(Clone)]
enum TreeEnum {
    Avl(Tree<i32>),
    Std(BTreeMap<i32, ()>),
}

impl TreeEnum {
    fn contains(&self, k: &i32) -> bool {
        match self {
            Self::Avl(t) => t.contains(k),
            Self::Std(t) => t.contains_key(k),
        }
    }

    fn insert(&mut self, k: i32) {
        match self {
            Self::Avl(t) => {
                t.insert(k);
            }
            Self::Std(t) => {
                t.insert(k, ());
            }
        }
    }

    fn delete(&mut self, k: &i32) {
        match self {
            Self::Avl(t) => {
                t.delete(k);
            }
            Self::Std(t) => {
                t.remove(k);
            }
        }
    }

    fn pop(&mut self) {
        match self {
            Self::Avl(t) => {
                t.pop();
            }
            Self::Std(t) => {
                t.pop_first();
            }
        }
    }

    fn sum(&self) -> i64 {
        match self {
            Self::Avl(t) => t.iter().map(|&x| i64::from(x)).sum(),
            Self::Std(t) => t.keys().map(|&x| i64::from(x)).sum(),
        }
    }
}

/// Helper to bench a function on a tree.
/// It creates a group for the given name and closure and runs tests for various sizes and
/// implementations of ordered containers before finishing the group.
fn bench_helper(c: &mut Criterion, name: &str, f: impl Fn(&mut TreeEnum, i32)) {
    let mut group = c.benchmark_group(name);

    for num_levels in [3, 7, 11, 15] {
        let num_nodes = 2usize.pow(num_levels as u32) - 1;
        let largest_element_in_tree = num_nodes as i32 - 1;

        let avl_tree = (0..num_nodes as i32).collect::<Tree<_>>();
        let std_tree = (0..num_nodes as i32).map(|x| (x, ())).collect::<BTreeMap<_, _>>();
        let tree_tests = [
            ("avl", TreeEnum::Avl(avl_tree)),
            ("std", TreeEnum::Std(std_tree)),
        ];
        for (name, tree) in tree_tests {
            let id = BenchmarkId::new(name, largest_element_in_tree);

            group.bench_function(id, |b| {
                b.iter_custom(|iters| {
                    let mut time = std::time::Duration::ZERO;
                    for _ in 0..iters {
                        let mut tree = black_box(tree.clone());
                        let instant = std::time::Instant::now();
                        f(&mut tree, black_box(largest_element_in_tree));
                        let elapsed = instant.elapsed();
                        time += elapsed;
                    }
                    time
                })
            });
        }
    }

    group.finish();
}

pub fn criterion_benchmark(c: &mut Criterion) {
    bench_helper(c, "search", |tree, i| {
        let _found = black_box(tree.contains(&i));
    });
    bench_helper(c, "delete", |tree, i| {
        tree.delete(&i);
    });

    bench_helper(c, "insert", |tree, i| {
        tree.insert(i + 1);
    });

    bench_helper(c, "search-miss", |tree, i| {
        let _found = black_box(tree.contains(&(i + 1)));
    });
    bench_helper(c, "delete-miss", |tree, i| {
        tree.delete(&(i + 1));
    });

    bench_helper(c, "pop", |tree, _| {
        tree.pop();
    });
    bench_helper(c, "iterate", |tree, _| {
        let _sum = black_box(tree.sum());
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
