#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_header_tests;

#[cfg(test)]
mod query_tests;

#[cfg(test)]
mod envelope_tests;

#[cfg(test)]
mod status_mapping_tests;

#[cfg(test)]
mod kyc_tests;

#[cfg(test)]
mod login_tests;

#[cfg(test)]
mod stats_tests;
