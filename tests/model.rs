use proptest::prelude::*;
use singly_list::{LinkedList, LinkedListLazy, ListError, MemoryPolicy, Singly};

#[derive(Debug, Clone)]
enum Op {
    Append(u8),
    Prepend(u8),
    InsertAt(u8, usize),
    RemoveAt(usize),
    Pop,
    At(usize),
    Find(u8),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        3 => any::<u8>().prop_map(Op::Append),
        2 => any::<u8>().prop_map(Op::Prepend),
        2 => (any::<u8>(), 0..40usize).prop_map(|(x, i)| Op::InsertAt(x, i)),
        2 => (0..40usize).prop_map(Op::RemoveAt),
        1 => Just(Op::Pop),
        1 => (0..40usize).prop_map(Op::At),
        1 => (0..16u8).prop_map(Op::Find),
    ]
}

fn out_of_range(index: usize, len: usize) -> ListError {
    ListError::IndexOutOfRange { index, len }
}

fn assert_consistent<M>(list: &LinkedList<u8, M>, model: &[u8])
where
    M: MemoryPolicy<Singly<u8>>,
{
    let values: Vec<_> = list.iter().copied().collect();
    assert_eq!(values, model);
    assert_eq!(list.len(), model.len());
    assert_eq!(list.is_empty(), model.is_empty());
    assert_eq!(list.front(), model.first());
    assert_eq!(list.back(), model.last());

    let utilization = list.utilization();
    assert_eq!(utilization.num_active_nodes, model.len());
    assert!(utilization.storage_len() <= utilization.capacity);

    let expected: String = model
        .iter()
        .map(|x| format!("({x}) => "))
        .fold("(head) => ".to_string(), |acc, x| acc + &x)
        + "(null)";
    assert_eq!(list.render(), expected);
}

fn run<M>(ops: &[Op])
where
    M: MemoryPolicy<Singly<u8>>,
{
    let mut list = LinkedList::<u8, M>::default();
    let mut model: Vec<u8> = vec![];

    for op in ops {
        let len = model.len();
        match op.clone() {
            Op::Append(x) => {
                list.append(x);
                model.push(x);
                assert_eq!(list.at(len), Ok(&x));
            }
            Op::Prepend(x) => {
                list.prepend(x);
                model.insert(0, x);
                assert_eq!(list.at(0), Ok(&x));
            }
            Op::InsertAt(x, i) => match i <= len {
                true => {
                    assert_eq!(list.insert_at(x, i), Ok(()));
                    model.insert(i, x);
                    assert_eq!(list.at(i), Ok(&x));
                }
                false => assert_eq!(list.insert_at(x, i), Err(out_of_range(i, len))),
            },
            Op::RemoveAt(i) => match i < len {
                true => assert_eq!(list.remove_at(i), Ok(model.remove(i))),
                false => assert_eq!(list.remove_at(i), Err(out_of_range(i, len))),
            },
            Op::Pop => match model.pop() {
                Some(x) => assert_eq!(list.pop(), Ok(x)),
                None => assert_eq!(list.pop(), Err(ListError::EmptyList)),
            },
            Op::At(i) => match model.get(i) {
                Some(x) => assert_eq!(list.at(i), Ok(x)),
                None => assert_eq!(list.at(i), Err(out_of_range(i, len))),
            },
            Op::Find(x) => {
                assert_eq!(list.find(&x), model.iter().position(|y| *y == x));
                assert_eq!(list.contains(&x), model.contains(&x));
            }
        }

        assert_consistent(&list, &model);
    }
}

proptest! {
    #[test]
    fn matches_vec_with_threshold_reclaim(ops in prop::collection::vec(op(), 0..200)) {
        run::<singly_list::DefaultMemory<u8>>(&ops);
    }

    #[test]
    fn matches_vec_without_reclaim(ops in prop::collection::vec(op(), 0..200)) {
        run::<singly_list::MemoryReclaimNever>(&ops);
    }

    #[test]
    fn manual_reclaim_preserves_sequence(
        values in prop::collection::vec(any::<u8>(), 1..60),
        removals in prop::collection::vec(any::<prop::sample::Index>(), 0..40),
    ) {
        let mut list = LinkedListLazy::default();
        let mut model = values.clone();
        for x in values {
            list.append(x);
        }

        for idx in removals {
            if model.is_empty() {
                break;
            }
            let i = idx.index(model.len());
            prop_assert_eq!(list.remove_at(i), Ok(model.remove(i)));
        }

        list.reclaim_closed_nodes();
        prop_assert_eq!(list.utilization().num_closed_nodes, 0);
        assert_consistent(&list, &model);

        list.append(7);
        model.push(7);
        assert_consistent(&list, &model);
    }
}
