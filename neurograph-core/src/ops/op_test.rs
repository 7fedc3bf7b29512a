use super::*;
use crate::utils::testing::check_tensor_near;

#[test]
fn test_op_from_str() {
    assert_eq!("+".parse::<Op>().unwrap(), Op::Add);
    assert_eq!("add".parse::<Op>().unwrap(), Op::Add);
    assert_eq!("*".parse::<Op>().unwrap(), Op::Mul);
    assert_eq!("tanh".parse::<Op>().unwrap(), Op::Tanh);
    assert_eq!("/".parse::<Op>().unwrap(), Op::Div);
    assert_eq!("none".parse::<Op>().unwrap(), Op::None);
    assert!(matches!(
        "%".parse::<Op>(),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
}

#[test]
fn test_op_display_round_trips_through_symbol() {
    for op in [Op::None, Op::Add, Op::Mul, Op::Tanh, Op::Div] {
        assert_eq!(op.to_string().parse::<Op>().unwrap(), op);
    }
}

#[test]
fn test_validate_errors() {
    assert!(matches!(
        Op::Div.validate(&[(1, 1), (1, 1)]),
        Err(NeuroGraphError::NotImplemented(_))
    ));
    assert!(matches!(
        Op::None.validate(&[(1, 1)]),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
    assert!(matches!(
        Op::Tanh.validate(&[(1, 1), (1, 1)]),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
    assert!(matches!(
        Op::Add.validate(&[(1, 1)]),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
    assert!(matches!(
        Op::Mul.validate(&[]),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
    assert!(matches!(
        Op::Add.validate(&[(2, 3), (3, 2)]),
        Err(NeuroGraphError::ShapeMismatch { .. })
    ));
    assert!(matches!(
        Op::Mul.validate(&[(2, 3), (2, 3)]),
        Err(NeuroGraphError::ShapeMismatch { .. })
    ));
}

#[test]
fn test_add_backward_passes_upstream_through() {
    let a = TensorData::from_rows(vec![vec![1.0, 2.0]]).unwrap();
    let b = TensorData::from_rows(vec![vec![3.0, 4.0]]).unwrap();
    let out = Op::Add.forward(&[&a, &b]).unwrap();
    let upstream = TensorData::from_rows(vec![vec![0.5, -2.0]]).unwrap();
    let grads = Op::Add
        .backward(&out, &[&a, &b], &upstream, MulGradientRule::MatrixProduct)
        .unwrap();
    assert_eq!(grads.len(), 2);
    check_tensor_near(&grads[0], (1, 2), &[0.5, -2.0], 0.0);
    check_tensor_near(&grads[1], (1, 2), &[0.5, -2.0], 0.0);
}

#[test]
fn test_mul_rules_agree_on_scalars() {
    let a = TensorData::from_rows(vec![vec![2.0]]).unwrap();
    let w = TensorData::from_rows(vec![vec![-3.0]]).unwrap();
    let out = Op::Mul.forward(&[&a, &w]).unwrap();
    let upstream = TensorData::filled(1, 1, 0.5).unwrap();

    let matrix = Op::Mul
        .backward(&out, &[&a, &w], &upstream, MulGradientRule::MatrixProduct)
        .unwrap();
    let elementwise = Op::Mul
        .backward(&out, &[&a, &w], &upstream, MulGradientRule::Elementwise)
        .unwrap();
    assert_eq!(matrix, elementwise);
    check_tensor_near(&matrix[0], (1, 1), &[-1.5], 1e-12);
    check_tensor_near(&matrix[1], (1, 1), &[1.0], 1e-12);
}

#[test]
fn test_tanh_backward_scales_upstream() {
    let x = TensorData::zeros(1, 2).unwrap();
    let y = Op::Tanh.forward(&[&x]).unwrap();
    let upstream = TensorData::from_rows(vec![vec![3.0, -1.0]]).unwrap();
    let grads = Op::Tanh
        .backward(&y, &[&x], &upstream, MulGradientRule::MatrixProduct)
        .unwrap();
    check_tensor_near(&grads[0], (1, 2), &[3.0, -1.0], 1e-12);
}

#[test]
fn test_forward_wrong_operand_count() {
    let a = TensorData::ones(1, 1).unwrap();
    assert!(matches!(
        Op::Add.forward(&[&a]),
        Err(NeuroGraphError::InvalidOperation(_))
    ));
    assert!(matches!(
        Op::Div.forward(&[&a, &a]),
        Err(NeuroGraphError::NotImplemented(_))
    ));
}
