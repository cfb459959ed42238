#[cfg(test)]
mod common;

#[cfg(test)]
mod session_flow_tests;

#[cfg(test)]
mod signup_flow_tests;

#[cfg(test)]
mod order_flow_tests;

#[cfg(test)]
mod navigation_tests;

#[cfg(test)]
mod relay_flow_tests;
