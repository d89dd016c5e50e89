use crate::constants::{
    INPUT_ARGUMENT_DESCRIPTION, INPUT_ARGUMENT_NAME_PREFIX, OUTPUT_ARGUMENT_DESCRIPTION,
    OUTPUT_ARGUMENT_NAME,
};
use crate::error::{ArgumentSlot, BindError};
use crate::method_callback::{MethodCallback, TypeToken};
use uabind::constants::DEFAULT_LOCALE;
use uabind::{ArgumentSpec, DataTypeId, LocalizedText};

/// The argument descriptors advertised for one method.
#[derive(Debug, Clone, PartialEq)]
pub struct ArgumentDescriptors {
    pub output: ArgumentSpec,
    pub inputs: Vec<ArgumentSpec>,
}

/// Derives the argument descriptors of `F` from its signature alone.
///
/// The return slot is checked first, then inputs in declaration order; the
/// first slot without a scalar data type fails the whole synthesis.
pub fn synthesize<F, Args>() -> Result<ArgumentDescriptors, BindError>
where
    F: MethodCallback<Args>,
{
    synthesize_from_tokens(F::output_token(), &F::input_tokens())
}

pub fn synthesize_from_tokens(
    output: TypeToken,
    inputs: &[TypeToken],
) -> Result<ArgumentDescriptors, BindError> {
    let output = output_argument(resolve(ArgumentSlot::Output, output)?);

    let inputs = inputs
        .iter()
        .enumerate()
        .map(|(position, token)| {
            resolve(ArgumentSlot::Input(position), *token)
                .map(|data_type| input_argument(position, data_type))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(ArgumentDescriptors { output, inputs })
}

fn resolve(slot: ArgumentSlot, token: TypeToken) -> Result<DataTypeId, BindError> {
    token.data_type.ok_or(BindError::UnsupportedType {
        slot,
        type_name: token.type_name,
    })
}

pub fn output_argument(data_type: DataTypeId) -> ArgumentSpec {
    ArgumentSpec::scalar(
        OUTPUT_ARGUMENT_NAME,
        LocalizedText::new(DEFAULT_LOCALE, OUTPUT_ARGUMENT_DESCRIPTION),
        data_type,
    )
}

pub fn input_argument(position: usize, data_type: DataTypeId) -> ArgumentSpec {
    ArgumentSpec::scalar(
        format!("{}{}", INPUT_ARGUMENT_NAME_PREFIX, position),
        LocalizedText::new(DEFAULT_LOCALE, INPUT_ARGUMENT_DESCRIPTION),
        data_type,
    )
}
