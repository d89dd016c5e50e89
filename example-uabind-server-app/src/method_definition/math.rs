use uabind::StatusCode;
use uabind_method::error::MethodFault;

pub fn add(lhs: f64, rhs: f64) -> f64 {
    lhs + rhs
}

pub fn divide(dividend: f64, divisor: f64) -> Result<f64, MethodFault> {
    if divisor == 0.0 {
        return Err(MethodFault::new(
            StatusCode::BadInvalidArgument,
            "division by zero",
        ));
    }
    Ok(dividend / divisor)
}
