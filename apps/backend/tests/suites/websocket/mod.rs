mod game_start_tests;
