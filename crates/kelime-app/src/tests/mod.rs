mod backup_flow_tests;
mod support;
