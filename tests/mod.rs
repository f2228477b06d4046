
// Integration tests for the booking library:
// - smoke_tests: the fixed slots and the conflict scenarios through the public API
// - booking_flow: the booking service against an in-memory backend mock
