use chrono::{DateTime, Utc};
use uabind::constants::DEFAULT_LOCALE;
use uabind::{ByteString, DataTypeId, ValueRank};
use uabind_method::error::{ArgumentSlot, BindError};
use uabind_method::{
    MethodCallback, OUTPUT_ARGUMENT_DESCRIPTION, OUTPUT_ARGUMENT_NAME, TypeToken, synthesize,
    synthesize_from_tokens,
};

fn descriptors_of<F, Args>(_callback: &F) -> Result<uabind_method::ArgumentDescriptors, BindError>
where
    F: MethodCallback<Args>,
{
    synthesize::<F, Args>()
}

#[test]
fn test_inputs_named_by_position() {
    let callback = |offset: i32, text: String| offset + text.len() as i32;
    let descriptors = descriptors_of(&callback).unwrap();

    assert_eq!(descriptors.output.name, OUTPUT_ARGUMENT_NAME);
    assert_eq!(descriptors.output.data_type, DataTypeId::Int32);
    assert_eq!(descriptors.output.value_rank, ValueRank::Scalar);
    assert_eq!(
        descriptors.output.description.text,
        OUTPUT_ARGUMENT_DESCRIPTION
    );
    assert_eq!(descriptors.output.description.locale, DEFAULT_LOCALE);

    assert_eq!(descriptors.inputs.len(), 2);
    assert_eq!(descriptors.inputs[0].name, "Arg0");
    assert_eq!(descriptors.inputs[0].data_type, DataTypeId::Int32);
    assert_eq!(descriptors.inputs[1].name, "Arg1");
    assert_eq!(descriptors.inputs[1].data_type, DataTypeId::String);
    assert!(
        descriptors
            .inputs
            .iter()
            .all(|input| input.value_rank == ValueRank::Scalar)
    );
}

#[test]
fn test_zero_arity_has_no_inputs() {
    let callback = || true;
    let descriptors = descriptors_of(&callback).unwrap();

    assert!(descriptors.inputs.is_empty());
    assert_eq!(descriptors.output.data_type, DataTypeId::Boolean);
}

#[test]
fn test_maximum_arity() {
    #[allow(clippy::too_many_arguments)]
    fn sum(
        a0: u8,
        a1: i8,
        a2: u16,
        a3: i16,
        a4: u32,
        a5: i32,
        a6: u64,
        a7: i64,
        a8: f32,
        a9: f64,
        a10: bool,
        a11: String,
    ) -> f64 {
        let integers = a0 as i64 + a1 as i64 + a2 as i64 + a3 as i64 + a4 as i64 + a5 as i64;
        integers as f64 + a6 as f64 + a7 as f64 + a8 as f64 + a9 + a10 as u8 as f64
            + a11.len() as f64
    }

    let descriptors = descriptors_of(&sum).unwrap();
    let names: Vec<_> = descriptors
        .inputs
        .iter()
        .map(|input| input.name.as_str())
        .collect();
    assert_eq!(
        names,
        [
            "Arg0", "Arg1", "Arg2", "Arg3", "Arg4", "Arg5", "Arg6", "Arg7", "Arg8", "Arg9",
            "Arg10", "Arg11"
        ]
    );
    let data_types: Vec<_> = descriptors
        .inputs
        .iter()
        .map(|input| input.data_type)
        .collect();
    assert_eq!(
        data_types,
        [
            DataTypeId::Byte,
            DataTypeId::SByte,
            DataTypeId::UInt16,
            DataTypeId::Int16,
            DataTypeId::UInt32,
            DataTypeId::Int32,
            DataTypeId::UInt64,
            DataTypeId::Int64,
            DataTypeId::Float,
            DataTypeId::Double,
            DataTypeId::Boolean,
            DataTypeId::String,
        ]
    );
}

#[test]
fn test_date_time_and_byte_string_slots() {
    let callback = |at: DateTime<Utc>, payload: ByteString| -> DateTime<Utc> {
        let _ = payload;
        at
    };
    let descriptors = descriptors_of(&callback).unwrap();

    assert_eq!(descriptors.output.data_type, DataTypeId::DateTime);
    assert_eq!(descriptors.inputs[0].data_type, DataTypeId::DateTime);
    assert_eq!(descriptors.inputs[1].data_type, DataTypeId::ByteString);
}

#[test]
fn test_fallible_return_uses_success_type() {
    let callback = |value: f64| -> Result<u64, std::io::Error> { Ok(value as u64) };
    let descriptors = descriptors_of(&callback).unwrap();

    assert_eq!(descriptors.output.data_type, DataTypeId::UInt64);
}

#[test]
fn test_unsupported_input_reports_position() {
    let callback = |count: i32, values: Vec<i32>| count + values.len() as i32;
    let err = descriptors_of(&callback).unwrap_err();

    match err {
        BindError::UnsupportedType { slot, type_name } => {
            assert_eq!(slot, ArgumentSlot::Input(1));
            assert!(type_name.contains("Vec<i32>"), "{}", type_name);
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[test]
fn test_unsupported_output_checked_before_inputs() {
    let callback = |values: Vec<i32>| {
        let _ = values;
    };
    let err = descriptors_of(&callback).unwrap_err();

    assert!(matches!(
        err,
        BindError::UnsupportedType {
            slot: ArgumentSlot::Output,
            type_name: "()",
        }
    ));
}

#[test]
fn test_synthesis_from_tokens() {
    let descriptors = synthesize_from_tokens(
        TypeToken::of::<bool>(),
        &[TypeToken::of::<u16>(), TypeToken::of::<ByteString>()],
    )
    .unwrap();

    assert_eq!(descriptors.output.data_type, DataTypeId::Boolean);
    assert_eq!(descriptors.inputs[0].data_type, DataTypeId::UInt16);
    assert_eq!(descriptors.inputs[1].data_type, DataTypeId::ByteString);

    let err = synthesize_from_tokens(
        TypeToken::of::<bool>(),
        &[TypeToken::of::<u16>(), TypeToken::of::<()>()],
    )
    .unwrap_err();
    assert!(matches!(
        err,
        BindError::UnsupportedType {
            slot: ArgumentSlot::Input(1),
            ..
        }
    ));
}
