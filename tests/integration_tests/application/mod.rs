mod render_orchestrator_test;
