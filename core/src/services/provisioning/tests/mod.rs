//! Tests for account provisioning
