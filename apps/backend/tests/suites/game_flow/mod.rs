mod seat_tests;
